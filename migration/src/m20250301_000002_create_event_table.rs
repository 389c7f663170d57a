use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_region_table::Region;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(text(Event::Type))
                    .col(integer(Event::Year))
                    .col(text(Event::Country))
                    .col(text(Event::Host))
                    .col(text(Event::Noc))
                    .col(date_null(Event::Start))
                    .col(date_null(Event::End))
                    .col(integer_null(Event::Duration))
                    .col(text_null(Event::DisabilitiesIncluded))
                    .col(integer_null(Event::Countries))
                    .col(integer_null(Event::Events))
                    .col(integer_null(Event::Sports))
                    .col(integer_null(Event::ParticipantsM))
                    .col(integer_null(Event::ParticipantsF))
                    .col(integer_null(Event::Participants))
                    .col(text_null(Event::Highlights))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_noc")
                            .from(Event::Table, Event::Noc)
                            .to(Region::Table, Region::Noc)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_country_year")
                    .table(Event::Table)
                    .col(Event::Country)
                    .col(Event::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Type,
    Year,
    Country,
    Host,
    #[sea_orm(iden = "NOC")]
    Noc,
    Start,
    End,
    Duration,
    DisabilitiesIncluded,
    Countries,
    Events,
    Sports,
    ParticipantsM,
    ParticipantsF,
    Participants,
    Highlights,
}
