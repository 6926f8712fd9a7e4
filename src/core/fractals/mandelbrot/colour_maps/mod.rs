pub mod coefficient_banding;
