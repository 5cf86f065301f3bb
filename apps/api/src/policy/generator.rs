//! Policy generation pipeline.
//!
//! Flow: render prompt -> completion call -> line-prefix field extraction.
//! Extraction never fails; every field resolves to a parsed value or its
//! default. Only the completion call itself can error, and that error
//! propagates to the handler.

use serde::Serialize;
use tracing::info;

use crate::llm_client::{CompletionModel, LlmError};
use crate::policy::category::{general_field_table, Category};
use crate::policy::parser::extract_fields;
use crate::policy::prompts::{render_category_prompt, render_general_prompt};

/// Storewide general policy response (3 fields).
/// Serialized key casing is part of the public wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct GeneralPolicy {
    #[serde(rename = "Return_Window")]
    pub return_window: String,
    #[serde(rename = "Condition_requirements")]
    pub condition_requirements: String,
    #[serde(rename = "Special_notes")]
    pub special_notes: String,
}

/// Category policy response (7 fields).
/// Serialized key casing is part of the public wire contract; note that
/// `Return_window` is cased differently from the general policy's
/// `Return_Window`, and `additional_notes` is lowercase.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPolicy {
    #[serde(rename = "Pay_on_delivery")]
    pub pay_on_delivery: String,
    #[serde(rename = "Returnable")]
    pub returnable: String,
    #[serde(rename = "Return_window")]
    pub return_window: String,
    #[serde(rename = "Condition_of_items")]
    pub condition_of_items: String,
    #[serde(rename = "Exceptions")]
    pub exceptions: String,
    #[serde(rename = "Refunds_exchanges")]
    pub refunds_exchanges: String,
    pub additional_notes: String,
}

/// Generates the storewide general policy for one customer.
pub async fn generate_general_policy(
    model: &dyn CompletionModel,
    customer_id: &str,
    customer_score: f64,
) -> Result<GeneralPolicy, LlmError> {
    info!("generating general policy for customer {customer_id} (score {customer_score})");

    let prompt = render_general_prompt(customer_id, customer_score);
    let raw = model.complete(&prompt).await?;

    let [return_window, condition_requirements, special_notes] =
        extract_fields(&raw, &general_field_table());

    Ok(GeneralPolicy {
        return_window,
        condition_requirements,
        special_notes,
    })
}

/// Generates a category-specific policy for one customer.
pub async fn generate_category_policy(
    model: &dyn CompletionModel,
    category: Category,
    customer_id: &str,
    customer_score: f64,
) -> Result<CategoryPolicy, LlmError> {
    info!("generating {category:?} policy for customer {customer_id} (score {customer_score})");

    let prompt = render_category_prompt(category, customer_id, customer_score);
    let raw = model.complete(&prompt).await?;

    let [pay_on_delivery, returnable, return_window, condition_of_items, exceptions, refunds_exchanges, additional_notes] =
        extract_fields(&raw, &category.field_table());

    Ok(CategoryPolicy {
        pay_on_delivery,
        returnable,
        return_window,
        condition_of_items,
        exceptions,
        refunds_exchanges,
        additional_notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Completion fake that returns a canned response regardless of prompt.
    struct ScriptedModel(&'static str);

    #[async_trait]
    impl CompletionModel for ScriptedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl CompletionModel for FailingModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_general_policy_parses_all_labeled_lines() {
        let model = ScriptedModel(
            "Return Window: 30 days\n\
             Condition Requirements: unworn with tags attached\n\
             Special Notes: free return shipping",
        );
        let policy = generate_general_policy(&model, "cust-1", 98.0).await.unwrap();

        assert_eq!(policy.return_window, "30 days");
        assert_eq!(policy.condition_requirements, "unworn with tags attached");
        assert_eq!(policy.special_notes, "free return shipping");
    }

    #[tokio::test]
    async fn test_general_policy_defaults_when_completion_is_prose() {
        let model = ScriptedModel("We are delighted to offer returns to this customer.");
        let policy = generate_general_policy(&model, "cust-1", 40.0).await.unwrap();

        assert_eq!(policy.return_window, "14 days");
        assert_eq!(policy.condition_requirements, "Item must be in original condition");
        assert_eq!(policy.special_notes, "No special notes");
    }

    // High-score fashion customer, model emits only the first three lines:
    // the remaining four fields come from the fashion defaults.
    #[tokio::test]
    async fn test_fashion_partial_completion_backfills_defaults() {
        let model = ScriptedModel("Pay on delivery: yes\nReturnable: yes\nReturn Window: 30 days");
        let policy = generate_category_policy(&model, Category::Fashion, "cust-9", 95.0)
            .await
            .unwrap();

        assert_eq!(policy.pay_on_delivery, "yes");
        assert_eq!(policy.returnable, "yes");
        assert_eq!(policy.return_window, "30 days");
        assert_eq!(
            policy.condition_of_items,
            "The items must be in their original packaging and unused for a return to be accepted."
        );
        assert_eq!(
            policy.exceptions,
            "Items returned after the 14-day window may not be eligible for a refund, \
             but we will provide a replacement at no additional cost."
        );
        assert_eq!(
            policy.refunds_exchanges,
            "We will process refunds within 3-5 business days of receiving the returned item."
        );
        assert_eq!(
            policy.additional_notes,
            "For Fashion, we recommend checking the product thoroughly upon delivery to \
             ensure it's in right condition before signing for it. If you notice any \
             issues, please contact us immediately."
        );
    }

    // A present Condition of Items line feeds the exceptions, refunds, and
    // additional-notes fields as well, since their rows scan for that prefix.
    #[tokio::test]
    async fn test_condition_line_feeds_trailing_fields() {
        let model = ScriptedModel(
            "Condition of Items: sealed box only\n\
             Exceptions and Restrictions: none\n\
             Refunds and Exchanges: full refund",
        );
        let policy = generate_category_policy(&model, Category::Toys, "cust-3", 70.0)
            .await
            .unwrap();

        assert_eq!(policy.condition_of_items, "sealed box only");
        assert_eq!(policy.exceptions, "sealed box only");
        assert_eq!(policy.refunds_exchanges, "sealed box only");
        assert_eq!(policy.additional_notes, "sealed box only");
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let result = generate_category_policy(&FailingModel, Category::Medicine, "cust-2", 55.0).await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_general_policy_serializes_wire_keys() {
        let model = ScriptedModel("Return Window: 21 days");
        let policy = generate_general_policy(&model, "cust-1", 60.0).await.unwrap();
        let value = serde_json::to_value(&policy).unwrap();

        assert_eq!(value["Return_Window"], "21 days");
        assert!(value.get("Condition_requirements").is_some());
        assert!(value.get("Special_notes").is_some());
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_category_policy_serializes_wire_keys() {
        let model = ScriptedModel("Returnable: yes");
        let policy = generate_category_policy(&model, Category::Sports, "cust-1", 60.0)
            .await
            .unwrap();
        let value = serde_json::to_value(&policy).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 7);
        for key in [
            "Pay_on_delivery",
            "Returnable",
            "Return_window",
            "Condition_of_items",
            "Exceptions",
            "Refunds_exchanges",
            "additional_notes",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["Returnable"], "yes");
    }
}
