mod test_auth;
mod test_capacities;
mod test_config;
mod test_push_datasets;
