//! Prompt templates for policy generation.
//!
//! Every template pins an explicit `Label: value` output format so the
//! extraction step has stable prefixes to scan for. Placeholders are
//! replaced before dispatch; values are substituted as plain text.

use crate::policy::category::Category;

/// Storewide general policy prompt (3 output fields).
/// Replace `{customer_id}` and `{customer_score}` before sending.
pub const GENERAL_PROMPT_TEMPLATE: &str = r#"Generate a single general return policy for a customer {customer_id} with a trustworthiness score of {customer_score} out of 100. Include a return window (in days), condition requirements, and any special notes. Be stricter for lower scores and more lenient for higher scores like Longer return window and lenient condition requirements for high score customers. Dont exceed 30 days.Format the output as:
    Return Window: [X days]
    Condition Requirements: [requirements]
    Special Notes: [notes]"#;

/// Category policy prompt (7 output fields), shared by every category.
/// Replace `{category}`, `{customer_id}`, `{customer_score}`, and
/// `{returnable_note}` before sending.
pub const CATEGORY_PROMPT_TEMPLATE: &str = r#"Generate a specific return policy for {category} products for a customer {customer_id} with a trustworthiness score of {customer_score} out of 100. The policy should be lenient for higher scores and stricter for lower scores. Provide the details directly, without headings or redundant information. Limit the response to 3-5 sentences. Ensure the style is consistent across all categories. Format the output as below:
    Pay on delivery: Whether Available [yes] or [no] for that customer and explain about it.
    Returnable: Whether available [yes] or [no] for that customer. If [Yes] then only give the below Return Window for that customer.{returnable_note}
    Return Window: Specify the time frame within which returns are accepted for that customer.
    Condition of Items: Mention the condition in which items must be returned for that customer.
    Exceptions and Restrictions: Highlight any exceptions or restrictions that apply for that customer.
    Refunds and Exchanges: State the policy on refunds and exchanges, including who covers return shipping costs if applicable for that customer.
    Additional Notes: Include any additional notes relevant to the return policy for that customer.
    "#;

/// Renders the general policy prompt for one customer.
pub fn render_general_prompt(customer_id: &str, customer_score: f64) -> String {
    GENERAL_PROMPT_TEMPLATE
        .replace("{customer_id}", customer_id)
        .replace("{customer_score}", &customer_score.to_string())
}

/// Renders the category policy prompt for one customer.
pub fn render_category_prompt(
    category: Category,
    customer_id: &str,
    customer_score: f64,
) -> String {
    CATEGORY_PROMPT_TEMPLATE
        .replace("{category}", category.prompt_label())
        .replace("{customer_id}", customer_id)
        .replace("{customer_score}", &customer_score.to_string())
        .replace("{returnable_note}", category.returnable_note())
}
