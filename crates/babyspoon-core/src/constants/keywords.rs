// ABOUTME: Hand-curated ingredient keyword lists for nutrition and allergy classification
// ABOUTME: Matched by substring containment, so entries are written as they appear in recipe text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Babyspoon Contributors

//! Keyword tables.
//!
//! Every entry is a substring target (e.g. `소고기` inside `다진소고기 20g`),
//! not a token. Order inside a list is the order matches are reported in.

/// Grain and starch keywords
pub const CARBS: &[&str] = &[
    "쌀", "오트밀", "파스타", "찹쌀", "국수", "밀가루", "감자", "고구마",
];

/// Protein keywords
pub const PROTEIN: &[&str] = &[
    "소고기", "쇠고기", "돼지고기", "닭고기", "두부", "콩", "계란", "노른자", "흰자", "생선", "가자미",
];

/// Vegetable keywords
pub const VEGGIES: &[&str] = &[
    "애호박", "시금치", "양배추", "브로콜리", "양파", "비트", "청경채", "단호박", "무", "배추", "오이",
];

/// Fruit keywords
pub const FRUITS: &[&str] = &["사과", "배", "바나나", "오렌지", "딸기", "블루베리"];

/// Beef in its two orthographic forms
pub const BEEF: &[&str] = &["소고기", "쇠고기"];

/// Dairy allergen keywords
pub const DAIRY: &[&str] = &["우유", "치즈", "요거트", "버터", "크림", "분유"];

/// Egg allergen keywords
pub const EGGS: &[&str] = &["계란", "달걀", "노른자", "흰자"];

/// Peanut allergen keywords
pub const PEANUTS: &[&str] = &["땅콩"];

/// Tree nut allergen keywords
pub const TREE_NUTS: &[&str] = &["호두", "아몬드", "잣", "캐슈넛", "밤"];

/// Wheat allergen keywords
pub const WHEAT: &[&str] = &["밀가루", "빵", "국수", "면", "파스타", "소면"];

/// Soy allergen keywords
pub const SOY: &[&str] = &["콩", "두부", "두유", "간장", "된장", "나또"];

/// Fish allergen keywords
pub const FISH: &[&str] = &["생선", "대구", "가자미", "조기", "멸치", "연어"];
