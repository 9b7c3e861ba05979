pub mod commit;
pub mod gen_tests;
pub mod report;
pub mod review;
