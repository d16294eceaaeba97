mod empty_data_fallback;
mod rule_list;

pub use empty_data_fallback::EmptyDataFallback;
pub use rule_list::RuleListBody;
