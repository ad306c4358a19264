mod algebra;
mod casting;
mod composition;
mod config;
mod orderings;
mod transcript;
