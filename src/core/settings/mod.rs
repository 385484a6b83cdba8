pub mod datasource_settings;
