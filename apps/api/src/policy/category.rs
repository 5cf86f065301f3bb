//! Product categories and their per-category prompt labels and fallback values.
//!
//! Each category maps to a field table consumed by the extraction step, so a
//! policy response always carries the full field set for its shape. The
//! storewide general policy has its own 3-field table and is not a variant.

use crate::policy::parser::FieldSpec;

// Defaults shared by every category.
const RETURN_WINDOW_DEFAULT: &str = "14 days";
const CONDITION_OF_ITEMS_DEFAULT: &str =
    "The items must be in their original packaging and unused for a return to be accepted.";
const EXCEPTIONS_DEFAULT: &str = "Items returned after the 14-day window may not be eligible \
    for a refund, but we will provide a replacement at no additional cost.";
const REFUNDS_DEFAULT: &str =
    "We will process refunds within 3-5 business days of receiving the returned item.";

/// Product categories with a dedicated return-policy route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Fashion,
    Medicine,
    Beauty,
    Toys,
    Sports,
}

impl Category {
    /// Text substituted for `{category}` in the prompt template.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Category::Electronics => "Tv, Appliances, Electronics",
            Category::Fashion => "fashion",
            Category::Medicine => "medicine",
            Category::Beauty => "beauty and personal",
            Category::Toys => "toys and games",
            // the sports route reuses the toys label
            Category::Sports => "toys and games",
        }
    }

    /// Extra instruction appended to the Returnable line of the prompt.
    /// Only electronics carries one.
    pub fn returnable_note(&self) -> &'static str {
        match self {
            Category::Electronics => {
                " For electronics don't give return for low customer scores, \
                 instead give replacement for genuine cases."
            }
            _ => "",
        }
    }

    /// Field table for this category's 7-field policy shape, in response
    /// field order: pay on delivery, returnable, return window, condition of
    /// items, exceptions, refunds/exchanges, additional notes.
    ///
    /// The last three rows scan for the `Condition of Items` prefix rather
    /// than their own labels, so they either share that line's parsed text
    /// or fall back to their defaults together.
    pub fn field_table(&self) -> [FieldSpec; 7] {
        [
            FieldSpec {
                label: "Pay on delivery",
                default: self.pay_on_delivery_default(),
            },
            FieldSpec {
                label: "Returnable",
                default: self.returnable_default(),
            },
            FieldSpec {
                label: "Return Window",
                default: RETURN_WINDOW_DEFAULT,
            },
            FieldSpec {
                label: "Condition of Items",
                default: CONDITION_OF_ITEMS_DEFAULT,
            },
            FieldSpec {
                label: "Condition of Items",
                default: EXCEPTIONS_DEFAULT,
            },
            FieldSpec {
                label: "Condition of Items",
                default: REFUNDS_DEFAULT,
            },
            FieldSpec {
                label: "Condition of Items",
                default: self.additional_notes_default(),
            },
        ]
    }

    fn pay_on_delivery_default(&self) -> &'static str {
        match self {
            // served verbatim, braces included; this default is not templated
            Category::Electronics | Category::Fashion => "Yes, this is available {customer_id}",
            _ => "Yes, this is available for that customer.",
        }
    }

    fn returnable_default(&self) -> &'static str {
        match self {
            Category::Electronics => "Yes, the customer can return electronics.",
            Category::Fashion => "Yes, the customer can return fashion.",
            Category::Medicine => {
                "Yes, the customer can return medicine provided not opening them."
            }
            Category::Beauty => {
                "Yes, the customer can return beauty products provided not using them."
            }
            Category::Toys => {
                "Yes, the customer can return toys and games provided not using them."
            }
            Category::Sports => {
                "Yes, the customer can return sports and outdoors provided not using them."
            }
        }
    }

    fn additional_notes_default(&self) -> &'static str {
        match self {
            Category::Electronics => {
                "For electronics, we recommend checking the product thoroughly upon delivery \
                 to ensure it's in working order before signing for it. If you notice any \
                 issues, please contact us immediately."
            }
            Category::Fashion => {
                "For Fashion, we recommend checking the product thoroughly upon delivery to \
                 ensure it's in right condition before signing for it. If you notice any \
                 issues, please contact us immediately."
            }
            Category::Medicine => {
                "For medicak, we recommend not opening the items if you notice any issues, \
                 please contact us immediately."
            }
            Category::Beauty => {
                "For beauty and personal products, we recommend not opening the items if you \
                 notice any issues, please contact us immediately."
            }
            Category::Toys => {
                "For toys and games, we recommend not opening the items if you notice any \
                 issues, please contact us immediately."
            }
            Category::Sports => {
                "For sports and outdoors, we recommend not opening the items if you notice \
                 any issues, please contact us immediately."
            }
        }
    }
}

/// Field table for the storewide general policy (3 fields), in response
/// field order: return window, condition requirements, special notes.
pub fn general_field_table() -> [FieldSpec; 3] {
    [
        FieldSpec {
            label: "Return Window",
            default: "14 days",
        },
        FieldSpec {
            label: "Condition Requirements",
            default: "Item must be in original condition",
        },
        FieldSpec {
            label: "Special Notes",
            default: "No special notes",
        },
    ]
}
