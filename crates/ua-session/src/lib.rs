mod store;


pub use store::SessionStore;
