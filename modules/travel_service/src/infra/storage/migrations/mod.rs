//! Database migrations for travel service

use sea_orm_migration::prelude::*;

/// Migrations share this file, so each one names itself explicitly.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_airline::Migration),
            Box::new(m20250301_000002_create_airport::Migration),
            Box::new(m20250301_000003_create_route::Migration),
        ]
    }
}

mod m20250301_000001_create_airline {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_airline"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Airline::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Airline::Id)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Airline::Callsign).string().not_null().default(""))
                        .col(ColumnDef::new(Airline::Country).string().not_null().default(""))
                        .col(ColumnDef::new(Airline::Iata).string().not_null().default(""))
                        .col(ColumnDef::new(Airline::Icao).string().not_null().default(""))
                        .col(ColumnDef::new(Airline::Name).string().not_null().default(""))
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_airline_country")
                        .table(Airline::Table)
                        .col(Airline::Country)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Airline::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Airline {
        Table,
        Id,
        Callsign,
        Country,
        Iata,
        Icao,
        Name,
    }
}

mod m20250301_000002_create_airport {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_airport"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Airport::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Airport::Id)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Airport::Airportname).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::City).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::Country).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::Faa).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::Icao).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::Tz).string().not_null().default(""))
                        .col(ColumnDef::new(Airport::Geo).json().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_airport_country")
                        .table(Airport::Table)
                        .col(Airport::Country)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Airport::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Airport {
        Table,
        Id,
        Airportname,
        City,
        Country,
        Faa,
        Icao,
        Tz,
        Geo,
    }
}

mod m20250301_000003_create_route {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_route"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Route::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Route::Id)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Route::Airline).string().not_null().default(""))
                        // Plain text reference, no foreign key to airline
                        .col(ColumnDef::new(Route::Airlineid).string().not_null().default(""))
                        .col(ColumnDef::new(Route::Sourceairport).string().not_null().default(""))
                        .col(
                            ColumnDef::new(Route::Destinationairport)
                                .string()
                                .not_null()
                                .default(""),
                        )
                        .col(ColumnDef::new(Route::Distance).double().not_null().default(0.0))
                        .col(ColumnDef::new(Route::Equipment).string().not_null().default(""))
                        .col(ColumnDef::new(Route::Stops).integer().not_null().default(0))
                        .col(ColumnDef::new(Route::Schedule).json().not_null())
                        .to_owned(),
                )
                .await?;

            // Create indexes
            manager
                .create_index(
                    Index::create()
                        .name("idx_route_sourceairport")
                        .table(Route::Table)
                        .col(Route::Sourceairport)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_route_destinationairport")
                        .table(Route::Table)
                        .col(Route::Destinationairport)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Route::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Route {
        Table,
        Id,
        Airline,
        Airlineid,
        Sourceairport,
        Destinationairport,
        Distance,
        Equipment,
        Stops,
        Schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn migration_names_are_unique() {
        let migrations = Migrator::migrations();
        let names: HashSet<String> = migrations.iter().map(|m| m.name().to_string()).collect();

        assert_eq!(names.len(), migrations.len());
        assert!(names.contains("m20250301_000003_create_route"));
    }
}
