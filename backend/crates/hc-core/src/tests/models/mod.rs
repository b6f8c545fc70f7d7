mod auth_response;
mod connection_status;
mod profile_update;
mod registration_form;
mod role;
mod route;
mod user_profile;
