mod extended_line;

pub use extended_line::ExtendedLine;
