//! SeaORM entities for database tables

/// Departments table entity
pub mod department {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "departments")]
    pub struct Model {
        /// Generated identity
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Department name (uniqueness checked by the write path, not the schema)
        pub name: String,

        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with employees
        #[sea_orm(has_many = "super::employee::Entity")]
        Employees,
    }

    impl Related<super::employee::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Employees.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Employees table entity
pub mod employee {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "employees")]
    pub struct Model {
        /// Generated identity
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub email: String,

        /// Foreign key to departments
        pub department_id: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentId",
            to = "super::department::Column::Id"
        )]
        Department,
    }

    impl Related<super::department::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Department.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
