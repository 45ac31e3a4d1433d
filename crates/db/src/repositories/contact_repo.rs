//! Repository for the `contact_info` singleton.

use sqlx::PgPool;

use crate::models::contact::{ContactInfo, SaveContactInfo};

const COLUMNS: &str = "id, primary_phone, secondary_phone, whatsapp_number, email, \
    address, city, state, postcode, country, business_hours, \
    facebook, instagram, linkedin, youtube, map_embed_code, \
    page_title, page_description, office_title, office_description, \
    created_at, updated_at";

/// Provides read/upsert access to the site's contact information.
pub struct ContactRepo;

impl ContactRepo {
    /// Fetch the contact information, if it has ever been saved.
    pub async fn find(pool: &PgPool) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info WHERE id = 1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite the singleton row.
    pub async fn upsert(
        pool: &PgPool,
        input: &SaveContactInfo,
    ) -> Result<ContactInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info
                (id, primary_phone, secondary_phone, whatsapp_number, email,
                 address, city, state, postcode, country, business_hours,
                 facebook, instagram, linkedin, youtube, map_embed_code,
                 page_title, page_description, office_title, office_description)
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                     $11, $12, $13, $14, $15, $16, $17, $18, $19)
             ON CONFLICT (id) DO UPDATE SET
                primary_phone = EXCLUDED.primary_phone,
                secondary_phone = EXCLUDED.secondary_phone,
                whatsapp_number = EXCLUDED.whatsapp_number,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                postcode = EXCLUDED.postcode,
                country = EXCLUDED.country,
                business_hours = EXCLUDED.business_hours,
                facebook = EXCLUDED.facebook,
                instagram = EXCLUDED.instagram,
                linkedin = EXCLUDED.linkedin,
                youtube = EXCLUDED.youtube,
                map_embed_code = EXCLUDED.map_embed_code,
                page_title = EXCLUDED.page_title,
                page_description = EXCLUDED.page_description,
                office_title = EXCLUDED.office_title,
                office_description = EXCLUDED.office_description,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactInfo>(&query)
            .bind(&input.primary_phone)
            .bind(&input.secondary_phone)
            .bind(&input.whatsapp_number)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.postcode)
            .bind(&input.country)
            .bind(&input.business_hours)
            .bind(&input.facebook)
            .bind(&input.instagram)
            .bind(&input.linkedin)
            .bind(&input.youtube)
            .bind(&input.map_embed_code)
            .bind(&input.page_title)
            .bind(&input.page_description)
            .bind(&input.office_title)
            .bind(&input.office_description)
            .fetch_one(pool)
            .await
    }
}
