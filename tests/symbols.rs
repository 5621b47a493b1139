use pretty_assertions::assert_eq;
use symeval::{
    ArraySymbol, EvalError, ScalarSymbol, SymbolTable, discover_symbols,
    interpreter::symbols::core::SymbolKind,
};

fn names(table: &SymbolTable) -> (Vec<&str>, Vec<&str>) {
    (table.scalars().iter().map(|s| s.name.as_str()).collect(),
     table.arrays().iter().map(|a| a.name.as_str()).collect())
}

#[test]
fn scalars_and_arrays_are_classified_by_subscript() {
    let table = discover_symbols("a + A[b] * (c - B[A[0]])").unwrap();
    assert_eq!(names(&table), (vec!["a", "b", "c"], vec!["A", "B"]));
}

#[test]
fn repeated_names_are_registered_once() {
    let table = discover_symbols("x + x * x - A[x] + A[A[x]]").unwrap();
    assert_eq!(names(&table), (vec!["x"], vec!["A"]));
    assert_eq!(table.len(), 2);
}

#[test]
fn discovery_is_idempotent() {
    let text = "foo * bar[foo] + foo / baz";
    assert_eq!(discover_symbols(text).unwrap(), discover_symbols(text).unwrap());
}

#[test]
fn names_are_case_sensitive() {
    let table = discover_symbols("a + A + a").unwrap();
    assert_eq!(names(&table), (vec!["a", "A"], vec![]));
}

#[test]
fn whitespace_before_subscript_still_marks_an_array() {
    let table = discover_symbols("A [1] + B\t[2]").unwrap();
    assert_eq!(names(&table), (vec![], vec!["A", "B"]));
}

#[test]
fn new_symbols_start_at_zero_and_unloaded() {
    let table = discover_symbols("x + A[1]").unwrap();
    assert_eq!(table.scalar("x"), Some(&ScalarSymbol { name:  "x".to_string(),
                                                       value: 0.0, }));
    assert_eq!(table.array("A"), Some(&ArraySymbol { name:   "A".to_string(),
                                                     values: None, }));
}

#[test]
fn literals_only_yield_empty_table() {
    let table = discover_symbols("1 + 2 * (3 - 4)").unwrap();
    assert!(table.is_empty());
}

#[test]
fn same_name_as_scalar_and_array_is_rejected() {
    let err = discover_symbols("x + x[1]").unwrap_err();
    assert_eq!(err,
               EvalError::SymbolKindConflict { name:     "x".to_string(),
                                               position: 4, });
}

#[test]
fn kind_lookup() {
    let table = discover_symbols("s + T[0]").unwrap();
    assert_eq!(table.kind_of("s"), Some(SymbolKind::Scalar));
    assert_eq!(table.kind_of("T"), Some(SymbolKind::Array));
    assert_eq!(table.kind_of("u"), None);
}

#[test]
fn inserting_an_existing_name_is_a_no_op() {
    let mut table = SymbolTable::new();
    assert!(table.insert_scalar("x"));
    table.scalar_mut("x").unwrap().value = 3.0;
    assert!(!table.insert_scalar("x"));
    assert_eq!(table.scalar_value("x"), 3.0);

    assert!(table.insert_array("A"));
    assert!(!table.insert_array("A"));
    assert_eq!(table.arrays().len(), 1);
}

#[test]
fn symbols_display_as_name_and_values() {
    let mut table = discover_symbols("x + A[0] + B[0]").unwrap();
    table.scalar_mut("x").unwrap().value = 2.5;
    let array = table.array_mut("A").unwrap();
    array.allocate(3).unwrap();
    array.values.as_mut().unwrap()[1] = 4.0;

    assert_eq!(table.scalar("x").unwrap().to_string(), "x=2.5");
    assert_eq!(table.array("A").unwrap().to_string(), "A=[0, 4, 0]");
    assert_eq!(table.array("B").unwrap().to_string(), "B=[]");
}

#[test]
fn array_reads_respect_declared_length() {
    let mut array = ArraySymbol::new("A");
    assert_eq!(array.len(), None);
    assert!(!array.is_empty());
    assert_eq!(array.get(1_000), Some(0.0));

    array.allocate(0).unwrap();
    assert!(array.is_empty());
    assert_eq!(array.get(0), None);

    array.allocate(2).unwrap();
    assert_eq!(array.len(), Some(2));
    assert_eq!(array.get(1), Some(0.0));
    assert_eq!(array.get(2), None);
}

#[test]
fn impossible_allocation_is_an_error() {
    let mut array = ArraySymbol::new("A");
    array.allocate(2).unwrap();

    assert!(array.allocate(usize::MAX).is_err());
    assert_eq!(array.values, Some(vec![0.0, 0.0]));
}
