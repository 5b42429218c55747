use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::beverage::model::Beverage;
use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::{Recipe, RecipeBundle, describe_beverage};
use business::domain::recommendation::services::RecipeGeneratorService;

use crate::client::OpenAIClient;

const MODEL: &str = "gpt-4o";

const SYSTEM_PROMPT: &str = "You are a bartender and a chef. You can provide cocktail and meal recipes. \
     You can only provide at most 2 recipes for each.";

/// Strict response format: two top-level recipe arrays, no additional
/// properties anywhere. The provider is asked to conform, and the parse in
/// [`parse_content`] re-validates because provider conformance is not a
/// guarantee.
fn recipes_response_format() -> serde_json::Value {
    let recipe_item = |subject: &str, ingredient_desc: &str, steps_desc: &str| {
        json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": format!("The name of the {}.", subject),
                },
                "ingredients": {
                    "type": "array",
                    "description": ingredient_desc,
                    "items": {
                        "type": "string",
                        "description": "The description of the ingredient.",
                    },
                },
                "steps": {
                    "type": "array",
                    "description": steps_desc,
                    "items": {
                        "type": "string",
                        "description": "Description of a preparation step.",
                    },
                },
            },
            "required": ["title", "ingredients", "steps"],
            "additionalProperties": false,
        })
    };

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "recipe_list",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "cocktails": {
                        "type": "array",
                        "description": "A list of cocktails objects with detailed information.",
                        "items": recipe_item(
                            "cocktail/drink",
                            "List of ingredients required for the recipe.",
                            "Ordered steps to prepare the cocktail.",
                        ),
                    },
                    "sideDishes": {
                        "type": "array",
                        "description": "A list of side dishes objects with detailed information.",
                        "items": recipe_item(
                            "meal",
                            "List of ingredients required for the dish.",
                            "Ordered steps to prepare the recipe.",
                        ),
                    },
                },
                "required": ["cocktails", "sideDishes"],
                "additionalProperties": false,
            },
        },
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipePayload {
    title: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeListPayload {
    cocktails: Vec<RecipePayload>,
    #[serde(rename = "sideDishes")]
    side_dishes: Vec<RecipePayload>,
}

pub struct RecipeGeneratorOpenAI {
    client: OpenAIClient,
}

impl RecipeGeneratorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_user_message(beverage: &Beverage) -> String {
        format!(
            "I want to know what to do with this beverage. {} \
             Can you help me with a cocktail recipe? Also, please provide some dishes to pair with it.",
            describe_beverage(beverage)
        )
    }

    /// Parses the completion content against the declared schema. Anything
    /// that deviates, including an empty recipe title, is an upstream
    /// contract violation; array order is kept untouched.
    fn parse_content(content: &str) -> Result<RecipeBundle, RecommendationError> {
        let payload: RecipeListPayload = serde_json::from_str(content)
            .map_err(|_| RecommendationError::UpstreamSchemaViolation)?;

        let into_recipes = |items: Vec<RecipePayload>| -> Result<Vec<Recipe>, RecommendationError> {
            items
                .into_iter()
                .map(|item| {
                    if item.title.trim().is_empty() {
                        return Err(RecommendationError::UpstreamSchemaViolation);
                    }
                    Ok(Recipe {
                        title: item.title,
                        ingredients: item.ingredients,
                        steps: item.steps,
                    })
                })
                .collect()
        };

        Ok(RecipeBundle::new(
            into_recipes(payload.cocktails)?,
            into_recipes(payload.side_dishes)?,
        ))
    }
}

#[async_trait]
impl RecipeGeneratorService for RecipeGeneratorOpenAI {
    async fn generate(&self, beverage: &Beverage) -> Result<RecipeBundle, RecommendationError> {
        let body = json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_user_message(beverage)},
            ],
            "response_format": recipes_response_format(),
            "temperature": 1,
            "max_completion_tokens": 2048,
            "top_p": 1,
            "frequency_penalty": 0,
            "presence_penalty": 0,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| RecommendationError::UpstreamUnavailable)?;

        if !response.status().is_success() {
            return Err(RecommendationError::UpstreamUnavailable);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::UpstreamUnavailable)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(RecommendationError::UpstreamSchemaViolation)?;

        Self::parse_content(content)
    }
}
