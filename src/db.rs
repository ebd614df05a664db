pub mod user_repo;
pub use user_repo::UserRepository;
pub mod residence_repo;
pub use residence_repo::ResidenceRepository;
pub mod activity_repo;
pub use activity_repo::ActivityRepository;
pub mod amenity_repo;
pub use amenity_repo::AmenityRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
pub mod complaint_repo;
pub use complaint_repo::ComplaintRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod association_repo;
pub use association_repo::AssociationRepository;
