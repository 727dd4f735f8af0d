use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "jobs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: Uuid,
    pub title: String,
    pub rate_amount: f64,
    pub rate_period: String,
    pub rate_currency: String,
    pub benefits: String,
    pub location_uid: Uuid,
    pub hirer_uid: Uuid,
    pub contract_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub live_until: DateTimeUtc,
    pub date_listed: DateTimeUtc,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationUid",
        to = "super::location::Column::Uid",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Location,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::HirerUid",
        to = "super::user::Column::Uid",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::job_skill::Entity")]
    JobSkill,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::job_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobSkill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
