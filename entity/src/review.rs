use sea_orm::entity::prelude::*;

/// A vehicle review, keyed by the vehicle's external code rather than its row id.
/// When `booking_id` is set the review documents a completed rental; the unique
/// index keeps it to one review per booking.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vehicle_code: String,
    pub reviewer_name: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub stars: i16,
    pub date: Date,
    #[sea_orm(unique)]
    pub booking_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Booking,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
