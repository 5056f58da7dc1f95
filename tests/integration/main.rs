mod helpers;
mod test_catalog;
mod test_dashboard_lists;
