pub mod update_presence;
