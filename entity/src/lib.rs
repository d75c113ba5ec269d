pub mod user;

/*
 A user owns exactly one row and is the only one allowed to change it.
 Registration and lookups are open, update and delete need the owner's bearer token.
 */
