//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Surrogate key assigned by the database.
        id -> Int4,
        /// Completion state.
        complete -> Bool,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Optional free-text description (empty string when absent).
        #[max_length = 500]
        description -> Varchar,
        /// Required expertise tag.
        #[max_length = 100]
        expertise -> Varchar,
        /// Opaque reference to an externally managed patient.
        patient_id -> Int4,
        /// Creation timestamp, database-assigned.
        created_at -> Timestamptz,
        /// Logical-deletion timestamp; non-null rows are soft deleted.
        deleted_at -> Nullable<Timestamptz>,
    }
}
