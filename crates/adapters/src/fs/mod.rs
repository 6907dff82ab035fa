mod scanner;

pub use scanner::WalkdirCatalogProvider;
