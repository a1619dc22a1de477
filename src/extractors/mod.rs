pub mod rules;
pub mod videolectures;

pub use videolectures::InfoExtractor;
