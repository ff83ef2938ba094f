pub mod fee_record;
