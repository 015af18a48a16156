pub mod bca_tahapan;
