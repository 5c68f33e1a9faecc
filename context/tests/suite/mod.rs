mod predicates;
mod resolution;
