//! Integration tests for the view adapters.
//!
//! Covers the documented examples of every adapter family, the
//! referencing/owning split of sources, and the capabilities each adapter
//! keeps or drops.

use pipeview::prelude::*;
use pipeview::{concat_views, zip, zip_transform};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

// =============================================================================
// Sources
// =============================================================================

#[test]
fn test_referencing_view_yields_caller_elements() {
    let data = vec![String::from("alpha"), String::from("beta")];
    let view = all(&data);
    for (item, original) in view.iter().zip(&data) {
        assert!(std::ptr::eq(item, original));
    }
}

#[test]
fn test_owning_and_referencing_yield_equal_elements() {
    let data = vec![String::from("alpha"), String::from("beta")];
    let referenced: Vec<String> = all(&data).iter().cloned().collect();
    let owned: Vec<String> = all(data.clone()).to();
    assert_eq!(referenced, owned);

    let owning_view = all(data.clone());
    let inside = owning_view.source();
    assert!(!std::ptr::eq(&inside[0], &data[0]));
}

#[test]
fn test_owning_view_outlives_its_source_expression() {
    fn build() -> Owning<Vec<i32>> {
        let local = vec![1, 2, 3];
        all(local)
    }
    assert_eq!(build().reverse().to::<Vec<_>>(), vec![3, 2, 1]);
}

// =============================================================================
// Element-wise adapters
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![1, 2, 3, 4], vec![2, 4])]
#[case(vec![2, 2, 5], vec![2, 2])]
fn test_filter_even(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let result: Vec<i32> = all(input).filter(|value| value % 2 == 0).to();
    assert_eq!(result, expected);
}

#[test]
fn test_enumerate_and_stride() {
    let letters: Vec<(usize, char)> = all("abcdefg").stride(3).enumerate().to();
    assert_eq!(letters, vec![(0, 'a'), (1, 'd'), (2, 'g')]);
}

#[test]
fn test_reverse_of_text() {
    assert_eq!(all("stressed").reverse().to::<String>(), "desserts");
}

#[test]
fn test_drop_while_skips_lazily_once() {
    let view = all("   indented").drop_while(|character| *character == ' ');
    assert_eq!(view.to::<String>(), "indented");
    assert_eq!(view.front(), Ok('i'));
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], "ab", 2)]
#[case(vec![], "abc", 0)]
#[case(vec![1, 2], "xyz", 2)]
fn test_zip_length_is_minimum(
    #[case] numbers: Vec<i32>,
    #[case] letters: &str,
    #[case] expected: usize,
) {
    assert_eq!(zip(numbers, letters).count(), expected);
}

#[test]
fn test_zip_macro_three_ways() {
    let rows: Vec<(i32, char, &str)> = zip!(vec![1, 2, 3], "xy", vec!["p", "q", "r"]).to();
    assert_eq!(rows, vec![(1, 'x', "p"), (2, 'y', "q")]);
}

#[test]
fn test_zip_transform_macro() {
    let sums: Vec<i32> =
        zip_transform!(|a: i32, b: i32| a + b, vec![1, 2, 3], vec![10, 20, 30]).to();
    assert_eq!(sums, vec![11, 22, 33]);
}

#[test]
fn test_concat_views_macro() {
    let view = concat_views!(vec![1, 2], Vec::<i32>::new(), vec![3], vec![4, 5]);
    assert_eq!(view.to::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(view.back(), Ok(5));
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![7], 1)]
#[case(vec![1, 2, 3], 5)]
#[case(vec![1, 2, 3, 4, 5, 6, 7], 13)]
fn test_intersperse_length(#[case] input: Vec<i32>, #[case] expected: usize) {
    assert_eq!(all(input).intersperse(0).count(), expected);
}

#[test]
fn test_join_words() {
    let words = vec!["Alpha", "Beta", "Gamma"];
    assert_eq!(all(&words).join().to::<String>(), "AlphaBetaGamma");
    assert_eq!(
        all(&words).join_with(", ").to::<String>(),
        "Alpha, Beta, Gamma"
    );
}

#[test]
fn test_join_skips_empty_and_join_with_keeps_them() {
    let parts = vec![vec![1], vec![], vec![2, 3]];
    assert_eq!(all(&parts).join().to::<Vec<_>>(), vec![&1, &2, &3]);
    assert_eq!(
        all(parts).join_with(vec![0]).to::<Vec<_>>(),
        vec![1, 0, 0, 2, 3]
    );
}

#[test]
fn test_transform_join_expands_each_element_once() {
    let repeated: String = all("abc")
        .transform_join(|character| {
            let count = (u32::from(character) - u32::from('a') + 1) as usize;
            std::iter::repeat_n(character, count).collect::<String>()
        })
        .to();
    assert_eq!(repeated, "abbccc");
}

// =============================================================================
// Chunking
// =============================================================================

fn chunk_strings<V>(view: &V) -> Vec<String>
where
    V: View,
    ViewItem<V>: View,
    ViewItem<ViewItem<V>>: Into<char>,
{
    view.iter()
        .map(|chunk| chunk.iter().map(Into::<char>::into).collect())
        .collect()
}

#[test]
fn test_slide_1234_by_3() {
    let windows = all("1234").slide(3);
    assert_eq!(chunk_strings(&windows), vec!["123", "234", "34", "4"]);
}

#[rstest]
#[case("", 2, vec![])]
#[case("abcde", 2, vec!["ab", "cd", "e"])]
#[case("abcd", 2, vec!["ab", "cd"])]
#[case("ab", 5, vec!["ab"])]
fn test_chunk_text(#[case] text: &str, #[case] size: usize, #[case] expected: Vec<&str>) {
    assert_eq!(chunk_strings(&all(text).chunk(size)), expected);
}

#[test]
fn test_split_and_split_on() {
    assert_eq!(
        chunk_strings(&all("a b  c").split(' ')),
        vec!["a", "b", "", "c"]
    );
    assert_eq!(
        chunk_strings(&all("key=>value=>end").split_on("=>".chars())),
        vec!["key", "value", "end"]
    );
}

#[test]
fn test_chunk_by_runs_relative_to_first() {
    let runs = all(vec![1, 2, 3, 10, 11, 20]).chunk_by(|first, next| next - first < 5);
    let sizes: Vec<usize> = runs.iter().map(|run| run.count()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
}

#[test]
fn test_group_by_key() {
    let words = vec!["apple", "avocado", "banana", "cherry", "cranberry"];
    let groups: Vec<(usize, Vec<&str>)> = all(&words)
        .group_by(|word| word.len() > 5)
        .iter()
        .map(|(long, run)| (usize::from(long), run.iter().copied().collect()))
        .collect();
    assert_eq!(
        groups,
        vec![
            (0, vec!["apple"]),
            (1, vec!["avocado", "banana", "cherry", "cranberry"]),
        ]
    );
}

// =============================================================================
// Capabilities
// =============================================================================

type VecCursor<'a> = <Borrowed<'a, [i32]> as View>::Cursor;
type Predicate = fn(&&'static i32) -> bool;

assert_impl_all!(VecCursor<'static>: RandomAccessCursor);
assert_impl_all!(ReverseCursor<VecCursor<'static>>: RandomAccessCursor);
assert_impl_all!(DropWhileCursor<VecCursor<'static>, Predicate>: RandomAccessCursor);
assert_impl_all!(ConcatCursor<VecCursor<'static>, VecCursor<'static>>: BidirectionalCursor);
assert_not_impl_any!(ConcatCursor<VecCursor<'static>, VecCursor<'static>>: RandomAccessCursor);
assert_not_impl_any!(FilterCursor<VecCursor<'static>, Predicate>: BidirectionalCursor);
assert_not_impl_any!(EnumerateCursor<VecCursor<'static>>: BidirectionalCursor);
assert_not_impl_any!(StrideCursor<VecCursor<'static>>: BidirectionalCursor);

#[test]
fn test_categories_reported_by_positions() {
    let data = vec![1, 2, 3];
    assert_eq!(all(&data).positions().0.category(), Category::RandomAccess);
    assert_eq!(
        all(&data).concat(&data).positions().0.category(),
        Category::Bidirectional
    );
    assert_eq!(
        all(&data).filter(|value| **value > 1).positions().0.category(),
        Category::Forward
    );
}

#[test]
fn test_random_access_through_reverse_and_drop_while() {
    let data = vec![5, 6, 7, 8, 9];
    let view = all(&data).drop_while(|value| **value < 7).reverse();
    assert_eq!(view.len(), 3);
    assert_eq!(view.at(0), Ok(&9));
    assert_eq!(view.at(2), Ok(&7));
    assert_eq!(view.at(3), Err(ViewError::OutOfRange { index: 3, len: 3 }));
}
