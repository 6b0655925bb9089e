use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Products::ProductId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Products::PId).string())
                    .col(ColumnDef::new(Products::Sku).string())
                    .col(ColumnDef::new(Products::BrandName).string())
                    .col(ColumnDef::new(Products::Manufacturer).string())
                    .col(ColumnDef::new(Products::PageUrl).string())
                    .col(ColumnDef::new(Products::MainImage).string())
                    .col(ColumnDef::new(Products::Quantity).integer().not_null().default(0))
                    .col(ColumnDef::new(Products::Weight).double().not_null().default(0.0))
                    .col(ColumnDef::new(Products::WeightUnit).string().not_null().default("kg"))
                    .col(ColumnDef::new(Products::Equivalency).string())
                    .col(ColumnDef::new(Products::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attributes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attributes::AttributeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attributes::ProductId).integer().not_null())
                    .col(ColumnDef::new(Attributes::AttributeName).string())
                    .col(ColumnDef::new(Attributes::AttributeValue).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attributes_product_id")
                            .from(Attributes::Table, Attributes::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::CategoryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::ProductId).integer().not_null())
                    .col(ColumnDef::new(Categories::TreeNumber).string())
                    .col(ColumnDef::new(Categories::Parent).string())
                    .col(ColumnDef::new(Categories::Level1).string())
                    .col(ColumnDef::new(Categories::Level2).string())
                    .col(ColumnDef::new(Categories::Level3).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_product_id")
                            .from(Categories::Table, Categories::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Descriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Descriptions::DescriptionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Descriptions::ProductId).integer().not_null())
                    .col(ColumnDef::new(Descriptions::Description).text())
                    .col(ColumnDef::new(Descriptions::AdditionalInformation).text())
                    .col(ColumnDef::new(Descriptions::MetaTitle).string())
                    .col(ColumnDef::new(Descriptions::MetaDescription).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_descriptions_product_id")
                            .from(Descriptions::Table, Descriptions::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Images::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Images::ImageId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Images::ProductId).integer().not_null())
                    .col(ColumnDef::new(Images::ImageUrl).string())
                    .col(ColumnDef::new(Images::ImageType).string())
                    .col(ColumnDef::new(Images::SortOrder).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_images_product_id")
                            .from(Images::Table, Images::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Options::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Options::OptionId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Options::ProductId).integer().not_null())
                    .col(ColumnDef::new(Options::OptionName).string())
                    .col(ColumnDef::new(Options::OptionType).string())
                    .col(ColumnDef::new(Options::OptionValue).string())
                    .col(ColumnDef::new(Options::OptionImage).string())
                    .col(ColumnDef::new(Options::OptionPricePrefix).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_options_product_id")
                            .from(Options::Table, Options::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pricing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pricing::PricingId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pricing::ProductId).integer().not_null())
                    .col(ColumnDef::new(Pricing::Price).double())
                    .col(ColumnDef::new(Pricing::OldPrice).double())
                    .col(ColumnDef::new(Pricing::Currency).string())
                    .col(ColumnDef::new(Pricing::Ccc).string())
                    .col(ColumnDef::new(Pricing::RecordedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pricing_product_id")
                            .from(Pricing::Table, Pricing::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::ReviewId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::ProductId).integer().not_null())
                    .col(ColumnDef::new(Reviews::ReviewsCount).integer())
                    .col(ColumnDef::new(Reviews::Rating).double())
                    .col(ColumnDef::new(Reviews::ReviewLink).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_product_id")
                            .from(Reviews::Table, Reviews::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stocks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stocks::StockId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stocks::ProductId).integer().not_null())
                    .col(ColumnDef::new(Stocks::Quantity).integer())
                    .col(ColumnDef::new(Stocks::Weight).double())
                    .col(ColumnDef::new(Stocks::WeightUnit).string())
                    .col(ColumnDef::new(Stocks::OutOfStockStatus).string())
                    .col(ColumnDef::new(Stocks::Equivalency).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stocks_product_id")
                            .from(Stocks::Table, Stocks::ProductId)
                            .to(Products::Table, Products::ProductId)
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
                    .name("idx_attributes_product_id")
                    .table(Attributes::Table)
                    .col(Attributes::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_categories_product_id")
                    .table(Categories::Table)
                    .col(Categories::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_descriptions_product_id")
                    .table(Descriptions::Table)
                    .col(Descriptions::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_images_product_id")
                    .table(Images::Table)
                    .col(Images::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_options_product_id")
                    .table(Options::Table)
                    .col(Options::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pricing_product_id")
                    .table(Pricing::Table)
                    .col(Pricing::ProductId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_product_id")
                    .table(Reviews::Table)
                    .col(Reviews::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_stocks_product_id")
                    .table(Stocks::Table)
                    .col(Stocks::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pricing::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Options::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Images::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Descriptions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attributes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Products {
    Table,
    ProductId,
    #[iden = "p_id"]
    PId,
    Sku,
    BrandName,
    Manufacturer,
    PageUrl,
    MainImage,
    Quantity,
    Weight,
    WeightUnit,
    Equivalency,
    CreatedAt,
}

#[derive(Iden)]
enum Attributes {
    Table,
    AttributeId,
    ProductId,
    AttributeName,
    AttributeValue,
}

#[derive(Iden)]
enum Categories {
    Table,
    CategoryId,
    ProductId,
    TreeNumber,
    Parent,
    #[iden = "level_1"]
    Level1,
    #[iden = "level_2"]
    Level2,
    #[iden = "level_3"]
    Level3,
}

#[derive(Iden)]
enum Descriptions {
    Table,
    DescriptionId,
    ProductId,
    Description,
    AdditionalInformation,
    MetaTitle,
    MetaDescription,
}

#[derive(Iden)]
enum Images {
    Table,
    ImageId,
    ProductId,
    ImageUrl,
    ImageType,
    SortOrder,
}

#[derive(Iden)]
enum Options {
    Table,
    OptionId,
    ProductId,
    OptionName,
    OptionType,
    OptionValue,
    OptionImage,
    OptionPricePrefix,
}

#[derive(Iden)]
enum Pricing {
    Table,
    PricingId,
    ProductId,
    Price,
    OldPrice,
    Currency,
    Ccc,
    RecordedAt,
}

#[derive(Iden)]
enum Reviews {
    Table,
    ReviewId,
    ProductId,
    ReviewsCount,
    Rating,
    ReviewLink,
}

#[derive(Iden)]
enum Stocks {
    Table,
    StockId,
    ProductId,
    Quantity,
    Weight,
    WeightUnit,
    OutOfStockStatus,
    Equivalency,
}
