//! Product feature summary block for document insertion.
//!
//! A side computation with no pricing effect: renders each product's
//! selected catalog features into the bullet block stamped onto the
//! proposal.

use crate::models::ProductItem;

/// Placeholder emitted when no product carries any selection.
const NO_FEATURES_SENTINEL: &str = "- No product features selected.";

/// Renders the feature bullet block across all products.
///
/// Products with at least one non-blank selection contribute a name
/// header (when named) followed by one bullet per selection; a
/// split-finish product adds its own bullet. Products with nothing
/// selected are skipped entirely, and if that leaves the block empty the
/// sentinel line is returned instead.
pub fn feature_block(products: &[ProductItem]) -> String {
    let mut blocks = Vec::new();

    for product in products {
        let mut bullets: Vec<String> = product
            .features
            .iter()
            .filter(|f| !f.selection.trim().is_empty())
            .map(|f| {
                if f.category.trim().is_empty() {
                    format!("- {}", f.selection.trim())
                } else {
                    format!("- {}: {}", f.category.trim(), f.selection.trim())
                }
            })
            .collect();

        if product.split_finish {
            bullets.push("- Finish: split interior/exterior".to_string());
        }

        if bullets.is_empty() {
            continue;
        }

        let mut block = String::new();
        if !product.name.trim().is_empty() {
            block.push_str(product.name.trim());
            block.push('\n');
        }
        block.push_str(&bullets.join("\n"));
        blocks.push(block);
    }

    if blocks.is_empty() {
        NO_FEATURES_SENTINEL.to_string()
    } else {
        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::FeatureSelection;

    use super::*;

    fn product_with(name: &str, features: &[(&str, &str)]) -> ProductItem {
        ProductItem {
            name: name.to_string(),
            features: features
                .iter()
                .map(|(category, selection)| FeatureSelection {
                    category: category.to_string(),
                    selection: selection.to_string(),
                })
                .collect(),
            ..ProductItem::default()
        }
    }

    #[test]
    fn empty_selections_yield_the_sentinel_line() {
        let products = vec![
            product_with("W-1", &[]),
            product_with("W-2", &[("Frame color", "")]),
        ];

        assert_eq!(feature_block(&products), "- No product features selected.");
    }

    #[test]
    fn selections_render_as_bullets_under_the_product_name() {
        let products = vec![product_with(
            "W-1",
            &[("Frame color", "Bronze"), ("Glass", "Low-E")],
        )];

        assert_eq!(
            feature_block(&products),
            "W-1\n- Frame color: Bronze\n- Glass: Low-E"
        );
    }

    #[test]
    fn unnamed_products_render_bullets_without_a_header() {
        let products = vec![product_with("", &[("Hardware", "Matte black")])];

        assert_eq!(feature_block(&products), "- Hardware: Matte black");
    }

    #[test]
    fn split_finish_adds_its_own_bullet() {
        let mut product = product_with("W-1", &[]);
        product.split_finish = true;

        assert_eq!(
            feature_block(&[product]),
            "W-1\n- Finish: split interior/exterior"
        );
    }

    #[test]
    fn products_are_separated_by_blank_lines() {
        let products = vec![
            product_with("W-1", &[("Frame color", "Bronze")]),
            product_with("W-2", &[("Frame color", "White")]),
        ];

        assert_eq!(
            feature_block(&products),
            "W-1\n- Frame color: Bronze\n\nW-2\n- Frame color: White"
        );
    }
}
