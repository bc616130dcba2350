pub(crate) fn get_test_corpus() -> Vec<String> {
    [
        "The cats are running in the Park!",
        "",
        "The quick brown fox jumps over the lazy dog.",
        "   ",
        "Foxes jumped over the sleeping dogs.",
        "It is what it is.",
        "Dogs cannot fly, but birds can.",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect::<Vec<_>>()
}
