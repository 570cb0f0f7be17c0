//! Outbound adapters for the third-party services behind the pipeline.

pub mod crm;
pub mod media;
pub mod repo;
pub mod verify;

pub use crm::CrmClient;
pub use media::{MediaClient, MultipartEncoder, ReqwestEncoder, UploadedAsset};
pub use repo::{FileState, RepoClient};
pub use verify::TurnstileVerifier;
