//! Diesel schema for report persistence.

diesel::table! {
    /// Lost and found reports.
    posts (id) {
        /// Report identifier.
        id -> Uuid,
        /// Report headline.
        #[max_length = 100]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// `lost` or `found`.
        #[max_length = 16]
        status -> Varchar,
        /// `dog`, `cat` or `other`.
        #[max_length = 16]
        species -> Varchar,
        /// Approximate zone.
        #[max_length = 120]
        zone_text -> Varchar,
        /// Date of the event.
        event_date -> Date,
        /// `whatsapp`, `email` or `form`.
        #[max_length = 16]
        contact_type -> Varchar,
        /// Contact value, emptied on resolve.
        #[max_length = 255]
        contact_value -> Varchar,
        /// Optional photo URL.
        image_url -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Whether the report is resolved.
        resolved -> Bool,
        /// Publisher's edit token.
        #[max_length = 64]
        edit_token -> Varchar,
    }
}
