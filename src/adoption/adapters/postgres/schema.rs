//! Diesel schema for adoption listing persistence.

diesel::table! {
    /// Adoption listings.
    adoptions (id) {
        /// Listing identifier.
        id -> Uuid,
        /// Name of the animal.
        #[max_length = 100]
        name -> Varchar,
        /// Free-form description.
        description -> Text,
        /// `available` or `adopted`.
        #[max_length = 16]
        status -> Varchar,
        /// `dog`, `cat` or `other`.
        #[max_length = 16]
        species -> Varchar,
        /// Approximate zone.
        #[max_length = 120]
        zone_text -> Varchar,
        /// `whatsapp`, `email` or `form`.
        #[max_length = 16]
        contact_type -> Varchar,
        /// Contact value.
        #[max_length = 255]
        contact_value -> Varchar,
        /// Optional photo URL.
        image_url -> Nullable<Text>,
        /// Whether the contact is hidden pending review.
        contact_hidden -> Bool,
        /// Number of community reports.
        reports_count -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Publisher's edit token.
        #[max_length = 64]
        edit_token -> Varchar,
    }
}
