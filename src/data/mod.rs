pub mod nowphas_directory;
pub mod nowphas_wave_data_record;
pub mod observation;
pub mod parseable_data_record;

pub use nowphas_directory::{read_dir, read_file};
pub use nowphas_wave_data_record::{FileLayout, NowphasWaveDataRecord};
pub use observation::{clean, Observation};
