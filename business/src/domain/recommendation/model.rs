use crate::domain::beverage::model::Beverage;

/// At most this many cocktails and this many side dishes per recommendation.
/// The generator persona is instructed with the same cap.
pub const MAX_RECIPES_PER_KIND: usize = 2;

/// A recipe returned by the generator. Never persisted.
///
/// `ingredients` and `steps` keep the exact order produced upstream;
/// step order is preparation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Cocktails and side dishes generated for one beverage.
#[derive(Debug, Clone)]
pub struct RecipeBundle {
    cocktails: Vec<Recipe>,
    side_dishes: Vec<Recipe>,
}

impl RecipeBundle {
    /// Caps each list at [`MAX_RECIPES_PER_KIND`]; order within a list is kept.
    pub fn new(mut cocktails: Vec<Recipe>, mut side_dishes: Vec<Recipe>) -> Self {
        cocktails.truncate(MAX_RECIPES_PER_KIND);
        side_dishes.truncate(MAX_RECIPES_PER_KIND);
        Self {
            cocktails,
            side_dishes,
        }
    }

    pub fn cocktails(&self) -> &[Recipe] {
        &self.cocktails
    }

    pub fn side_dishes(&self) -> &[Recipe] {
        &self.side_dishes
    }

    pub fn into_parts(self) -> (Vec<Recipe>, Vec<Recipe>) {
        (self.cocktails, self.side_dishes)
    }
}

/// Response of the recipes-per-beverage flow. Never persisted.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub beverage_description: String,
    pub cocktails: Vec<Recipe>,
    pub side_dishes: Vec<Recipe>,
}

impl Recommendation {
    pub fn new(beverage_description: String, bundle: RecipeBundle) -> Self {
        let (cocktails, side_dishes) = bundle.into_parts();
        Self {
            beverage_description,
            cocktails,
            side_dishes,
        }
    }
}

/// Builds the natural-language sentence describing a beverage, used both as
/// prompt material for the generator and as `debugInfo.beverage` in the
/// response.
pub fn describe_beverage(beverage: &Beverage) -> String {
    format!(
        "It's name is {}, described as {}, it belongs to the category {} and has the following properties: {}.",
        beverage.title,
        beverage.description,
        beverage.category,
        beverage.tags.join(", ")
    )
}
