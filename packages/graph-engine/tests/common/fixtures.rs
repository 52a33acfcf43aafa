//! Input stream fixtures

/// Five-stop weighted graph followed by a second, disconnected graph
pub const WEIGHTED_TWO_GRAPHS: &str = "\
5
Aurora and 85th
Green Lake Starbucks
Woodland Park Zoo
Troll under bridge
PCC
1 2 50
1 3 20
1 5 30
2 4 10
3 2 20
3 4 40
5 2 20
5 4 25
0 0 0
3
aaa
bbb
ccc
1 2 10
0 0 0
";

/// Adjacency graph with branching and shared successors
pub const ADJACENCY_BRANCHING: &str = "\
5
Aurora and 85th
Green Lake Starbucks
Woodland Park Zoo
Troll under bridge
PCC
1 2
1 3
1 5
2 4
3 2
3 4
5 2
5 4
0 0
";

/// Weighted graph whose edge section is cut short by garbage
pub const WEIGHTED_TRAILING_GARBAGE: &str = "\
2
left
right
1 2 3
this is not an edge
2 1 1
";
