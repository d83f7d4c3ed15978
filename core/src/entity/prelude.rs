pub use super::categories::Entity as Categories;
pub use super::personal_access_tokens::Entity as PersonalAccessTokens;
pub use super::products::Entity as Products;
pub use super::users::Entity as Users;
