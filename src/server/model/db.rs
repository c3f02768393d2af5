//! Database model type aliases.
//!
//! Short names for the sea-orm models of the `entity` crate.

/// User account.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique login email
/// - `password` - Stored password, never serialized in responses
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Star Wars character.
///
/// # Fields (from `entity::character::Model`)
/// - `id` - Primary key
/// - `name` - Character name
/// - `url` - Reference URL for the character
/// - `attributes` - JSON object of string attributes
pub type CharacterModel = entity::character::Model;

/// Star Wars planet, same shape as [`CharacterModel`].
pub type PlanetModel = entity::planet::Model;

/// Link between a user and a favorite character.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Link between a user and a favorite planet.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
