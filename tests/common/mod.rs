#![allow(dead_code)]

pub fn symbol_value(symbol: char) -> i32 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        other => panic!("not a roman symbol: {}", other),
    }
}

/// Standard right-to-left decoding: a symbol smaller than its right neighbour is subtracted.
pub fn decode(numeral: &str) -> i32 {
    let mut total = 0;
    let mut prev = 0;
    for value in numeral.chars().rev().map(symbol_value) {
        if value < prev {
            total -= value;
        } else {
            total += value;
            prev = value;
        }
    }
    total
}
