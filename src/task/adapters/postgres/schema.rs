//! Diesel schema for task persistence.

diesel::table! {
    /// Assigned tasks. `user_id` carries no foreign key.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning user reference.
        user_id -> Int8,
        /// Display icon.
        #[max_length = 16]
        icon -> Varchar,
        /// Task description.
        text -> Text,
        /// Deadline, stored verbatim.
        date_info -> Nullable<Text>,
        /// Caller-defined status.
        status -> Text,
    }
}
