use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Producers::ProducerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Producers::PId).string())
                    .col(ColumnDef::new(Producers::Producer).string())
                    .col(ColumnDef::new(Producers::City).string())
                    .col(ColumnDef::new(Producers::StoreName).string())
                    .col(ColumnDef::new(Producers::Description).text())
                    .col(ColumnDef::new(Producers::Type).string())
                    .col(ColumnDef::new(Producers::Ccc).string())
                    .col(ColumnDef::new(Producers::Active).boolean())
                    .col(ColumnDef::new(Producers::Comment).text())
                    .col(
                        ColumnDef::new(Producers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Producers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contact::ContactId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contact::ProducerId).integer().not_null())
                    .col(ColumnDef::new(Contact::ContactName).string())
                    .col(ColumnDef::new(Contact::Phone).string())
                    .col(ColumnDef::new(Contact::Phone2).string())
                    .col(ColumnDef::new(Contact::Email).string())
                    .col(ColumnDef::new(Contact::EmailPrivate).string())
                    .col(ColumnDef::new(Contact::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_contact_producer_id")
                            .from(Contact::Table, Contact::ProducerId)
                            .to(Producers::Table, Producers::ProducerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(License::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(License::LicenseId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(License::ProducerId).integer().not_null())
                    .col(ColumnDef::new(License::LicenseType).string())
                    .col(ColumnDef::new(License::DateLicensed).string())
                    .col(ColumnDef::new(License::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_license_producer_id")
                            .from(License::Table, License::ProducerId)
                            .to(Producers::Table, Producers::ProducerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Location::LocationId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Location::ProducerId).integer().not_null())
                    .col(ColumnDef::new(Location::StoreName).string())
                    .col(ColumnDef::new(Location::Address).string())
                    .col(ColumnDef::new(Location::FullAddress).string())
                    .col(ColumnDef::new(Location::City).string())
                    .col(ColumnDef::new(Location::Province).string())
                    .col(ColumnDef::new(Location::PostalCode).string())
                    .col(ColumnDef::new(Location::Country).string())
                    .col(ColumnDef::new(Location::Longitude).double())
                    .col(ColumnDef::new(Location::Latitude).double())
                    .col(ColumnDef::new(Location::Ccc).string())
                    .col(ColumnDef::new(Location::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_producer_id")
                            .from(Location::Table, Location::ProducerId)
                            .to(Producers::Table, Producers::ProducerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::MediaId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::ProducerId).integer().not_null())
                    .col(ColumnDef::new(Media::PageUrl).string())
                    .col(ColumnDef::new(Media::Link).string())
                    .col(ColumnDef::new(Media::Social).string())
                    .col(ColumnDef::new(Media::CreatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_producer_id")
                            .from(Media::Table, Media::ProducerId)
                            .to(Producers::Table, Producers::ProducerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Detail views look children up by parent id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_producer_id")
                    .table(Contact::Table)
                    .col(Contact::ProducerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_license_producer_id")
                    .table(License::Table)
                    .col(License::ProducerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_location_producer_id")
                    .table(Location::Table)
                    .col(Location::ProducerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_media_producer_id")
                    .table(Media::Table)
                    .col(Media::ProducerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(License::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Producers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Producers {
    Table,
    ProducerId,
    #[iden = "p_id"]
    PId,
    Producer,
    City,
    StoreName,
    Description,
    Type,
    Ccc,
    Active,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Contact {
    Table,
    ContactId,
    ProducerId,
    ContactName,
    Phone,
    #[iden = "phone_2"]
    Phone2,
    Email,
    EmailPrivate,
    CreatedAt,
}

#[derive(Iden)]
enum License {
    Table,
    LicenseId,
    ProducerId,
    LicenseType,
    DateLicensed,
    CreatedAt,
}

#[derive(Iden)]
enum Location {
    Table,
    LocationId,
    ProducerId,
    StoreName,
    Address,
    FullAddress,
    City,
    Province,
    PostalCode,
    Country,
    Longitude,
    Latitude,
    Ccc,
    CreatedAt,
}

#[derive(Iden)]
enum Media {
    Table,
    MediaId,
    ProducerId,
    PageUrl,
    Link,
    Social,
    CreatedAt,
}
