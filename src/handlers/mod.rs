pub(crate) mod handle_panic;
pub(crate) mod not_found;
pub(crate) mod params;
pub(crate) mod raise_client_error;
pub(crate) mod raise_server_error;
pub(crate) mod server_error;
