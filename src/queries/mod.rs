pub mod campaigns;
pub mod offers;
pub mod platforms;
