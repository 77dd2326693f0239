pub const NESTED_INPUT: &str = r"
style:
  icon: Box
metadata:
  difficulty: beginner
";
pub const NESTED_EVENTS: &str = r"
+MAP
=KEY style
+MAP
=KEY icon
=STR Box
-MAP
=KEY metadata
+MAP
=KEY difficulty
=STR beginner
-MAP
-MAP";

pub const WEAVE_INPUT: &str = r##"
# Weave configuration
name: Rust Fundamentals
description: "Ownership, borrowing: the basics"

style:
  icon: Folder
  color: "#dea584"
  thumbnail: assets/cover.png

metadata:
  createdAt: 2026-10-16
  tags: [rust, systems, "memory safety"]
  authors:
    - Ferris
    - 'Graydon'

order: 3
featured: true
hidden: false
weight: 1.5
"##;
pub const WEAVE_EVENTS: &str = r"
+MAP
=KEY name
=STR Rust Fundamentals
=KEY description
=STR Ownership, borrowing: the basics
=KEY style
+MAP
=KEY icon
=STR Folder
=KEY color
=STR #dea584
=KEY thumbnail
=STR assets/cover.png
-MAP
=KEY metadata
+MAP
=KEY createdAt
=STR 2026-10-16
=KEY tags
+SEQ
=STR rust
=STR systems
=STR memory safety
-SEQ
=KEY authors
+SEQ
=STR Ferris
=STR Graydon
-SEQ
-MAP
=KEY order
=INT 3
=KEY featured
=BOOL true
=KEY hidden
=BOOL false
=KEY weight
=FLOAT 1.5
-MAP";
pub const WEAVE_OUTPUT: &str = r##"name: Rust Fundamentals
description: "Ownership, borrowing: the basics"
style:
  icon: Folder
  color: "#dea584"
  thumbnail: assets/cover.png
metadata:
  createdAt: 2026-10-16
  tags:
    - rust
    - systems
    - memory safety
  authors:
    - Ferris
    - Graydon
order: 3
featured: true
hidden: false
weight: 1.5"##;

pub const COMMENTED_INPUT: &str = r"
# top comment
name: Loom

   # indented comment
tags:
  # between items
  - a

  - b
style:

  icon: Box
";
pub const UNCOMMENTED_INPUT: &str = r"name: Loom
tags:
  - a
  - b
style:
  icon: Box";

pub const BLOCK_SEQ_INPUT: &str = r"
tags:
  - alpha
  - beta
";
pub const ZERO_INDENT_SEQ_INPUT: &str = r"
tags:
- alpha
- beta
title: x
";
pub const ZERO_INDENT_SEQ_EVENTS: &str = r"
+MAP
=KEY tags
+SEQ
=STR alpha
=STR beta
-SEQ
=KEY title
=STR x
-MAP";

pub const SEQ_OF_MAPS_INPUT: &str = r#"
links:
  -
    title: Home
    url: "https://quarry.space"
  -
    title: Docs
    tags: [guide]
"#;
pub const SEQ_OF_MAPS_EVENTS: &str = r"
+MAP
=KEY links
+SEQ
+MAP
=KEY title
=STR Home
=KEY url
=STR https://quarry.space
-MAP
+MAP
=KEY title
=STR Docs
=KEY tags
+SEQ
=STR guide
-SEQ
-MAP
-SEQ
-MAP";
pub const SEQ_OF_MAPS_OUTPUT: &str = r#"links:
  -
    title: Home
    url: "https://quarry.space"
  -
    title: Docs
    tags:
      - guide"#;

pub const BLOCK_MARKER_INPUT: &str = r"
summary: |
  body: text
notes: >
after: 1
";
pub const BLOCK_MARKER_EVENTS: &str = r"
+MAP
=KEY summary
+MAP
=KEY body
=STR text
-MAP
=KEY notes
+MAP
-MAP
=KEY after
=INT 1
-MAP";

pub const DEDENT_INPUT: &str = r"
a:
   deep: 1
  shallow: 2
 one: 3
b: 4
";
pub const DEDENT_EVENTS: &str = r"
+MAP
=KEY a
+MAP
=KEY deep
=INT 1
=KEY shallow
=INT 2
-MAP
=KEY one
=INT 3
=KEY b
=INT 4
-MAP";

pub const QUOTED_INPUT: &str = r##"
plain: hi there
double: "hi there"
single: 'hi there'
escaped: "say \"hi\" now"
colon: "a: b"
hash: "#1"
number_text: "42"
bool_text: 'true'
url: https://x.io/a:b
"##;
pub const QUOTED_EVENTS: &str = r#"
+MAP
=KEY plain
=STR hi there
=KEY double
=STR hi there
=KEY single
=STR hi there
=KEY escaped
=STR say "hi" now
=KEY colon
=STR a: b
=KEY hash
=STR #1
=KEY number_text
=STR 42
=KEY bool_text
=STR true
=KEY url
=STR https://x.io/a:b
-MAP"#;
pub const QUOTED_OUTPUT: &str = r##"plain: hi there
double: hi there
single: hi there
escaped: say "hi" now
colon: "a: b"
hash: "#1"
number_text: "42"
bool_text: "true"
url: "https://x.io/a:b""##;

pub const INLINE_SEQ_INPUT: &str = r#"
tags: [a, b, c]
quoted: ["x", 'y', z]
sparse: [ one ,, two, ]
numbers: [1, 2.5, true]
empty: []
spaced: [  ]
"#;
pub const INLINE_SEQ_EVENTS: &str = r"
+MAP
=KEY tags
+SEQ
=STR a
=STR b
=STR c
-SEQ
=KEY quoted
+SEQ
=STR x
=STR y
=STR z
-SEQ
=KEY sparse
+SEQ
=STR one
=STR two
-SEQ
=KEY numbers
+SEQ
=STR 1
=STR 2.5
=STR true
-SEQ
=KEY empty
+SEQ
-SEQ
=KEY spaced
+SEQ
-SEQ
-MAP";
pub const INLINE_SEQ_OUTPUT: &str = r#"tags:
  - a
  - b
  - c
quoted:
  - x
  - y
  - z
sparse:
  - one
  - two
numbers:
  - "1"
  - "2.5"
  - "true"
empty: []
spaced: []"#;
