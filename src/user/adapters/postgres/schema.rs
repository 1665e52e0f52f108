//! Diesel schema for credential persistence.

diesel::table! {
    /// Registered users and their password digests.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// First name.
        #[max_length = 255]
        first_name -> Varchar,
        /// Last name.
        #[max_length = 255]
        last_name -> Varchar,
        /// Unique email address.
        #[max_length = 255]
        email -> Varchar,
        /// Argon2id PHC digest.
        #[max_length = 255]
        password -> Varchar,
        /// Role (`user` or `admin`).
        #[max_length = 20]
        role -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
