//! Diesel table definitions mirroring `migrations/`.

diesel::table! {
    users (id) {
        id -> Int8,
        companyname -> Varchar,
        username -> Varchar,
    }
}

diesel::table! {
    schedules (id) {
        id -> Int8,
        userid -> Int8,
        workingdate -> Date,
        place -> Nullable<Varchar>,
        workcontent -> Varchar,
        numberofpeople -> Int4,
    }
}
