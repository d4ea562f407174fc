use std::{env, process, sync::Arc, thread};

use monitor::DiningMonitor;

mod monitor;
mod philosopher;

// 引数を省略したときの哲学者の人数
const DEFAULT_NUM_PHILOSOPHERS: usize = 4;

fn main() {
    let num = match env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(n) if n >= 2 => n,
            // 箸の共有が成り立つのは 2 人から
            _ => {
                eprintln!("\"{arg}\" is not a valid number of philosophers (need an integer >= 2)");
                process::exit(1);
            }
        },
        None => DEFAULT_NUM_PHILOSOPHERS,
    };

    println!("{num} philosophers come to the table");

    let monitor = Arc::new(DiningMonitor::new(num));
    let mut v = Vec::new();

    for id in 1..=num {
        let monitor0 = monitor.clone();
        let t = thread::spawn(move || philosopher::run(id, monitor0));
        v.push(t);
    }

    for t in v {
        t.join().unwrap();
    }

    println!("all philosophers are done");
}
