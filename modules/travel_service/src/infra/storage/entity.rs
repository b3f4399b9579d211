//! SeaORM entities for the document collections
//!
//! One table per collection. Embedded payloads (`geo`, `schedule`) are JSON
//! columns and stay opaque to queries.

/// Airline collection
pub mod airline {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "airline")]
    pub struct Model {
        /// Caller-supplied key
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub callsign: String,
        pub country: String,
        pub iata: String,
        pub icao: String,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Airport collection
pub mod airport {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "airport")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub airportname: String,
        pub city: String,
        pub country: String,
        pub faa: String,
        pub icao: String,
        pub tz: String,
        /// `{"alt": .., "lat": .., "lon": ..}`
        pub geo: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Route collection
pub mod route {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "route")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub airline: String,
        /// Airline id as text; no foreign key
        pub airlineid: String,
        pub sourceairport: String,
        pub destinationairport: String,
        pub distance: f64,
        pub equipment: String,
        pub stops: i32,
        /// Array of `{"day", "utc", "flight"}`
        pub schedule: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
