/// walk the deposit tier tables
use loyalty_accrual_rs::{Yen, DOMESTIC_DEPOSIT, FOREIGN_DEPOSIT};

fn main() {
    println!("yen deposit balance -> monthly rate");
    for man_yen in [50, 100, 300, 500, 1_000, 2_000] {
        let balance = Yen::from_man(man_yen);
        println!("  {} yen -> {}", balance, DOMESTIC_DEPOSIT.lookup(balance));
    }

    println!("foreign deposit balance -> monthly rate");
    for man_yen in [1, 25, 100, 500, 1_000, 10_000] {
        let balance = Yen::from_man(man_yen);
        println!("  {} yen -> {}", balance, FOREIGN_DEPOSIT.lookup(balance));
    }
}
