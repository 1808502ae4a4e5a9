//! Diesel schema for user persistence.

diesel::table! {
    /// Registered user records.
    users (id) {
        /// Internal user identifier.
        id -> Uuid,
        /// Unique login email address.
        #[max_length = 255]
        email -> Varchar,
        /// Argon2id PHC password hash.
        #[max_length = 255]
        password_hash -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
