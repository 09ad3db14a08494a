pub mod bin_roster;
pub mod csv_roster;
pub mod json_roster;
pub mod path;
pub mod roster_storage;
pub mod xml_roster;
