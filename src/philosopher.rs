use std::{sync::Arc, thread, time::Duration};

use rand::Rng;

use crate::monitor::DiningMonitor;

// 食事と思索のサイクルを繰り返す回数
const DINING_STEPS: usize = 10;

// 1 回の動作にかける最大時間 (ミリ秒)
const TIME_TO_WASTE: u64 = 1000;

// 哲学者スレッドの本体
// モニタを呼ぶ順番はここだけが決める: pick_up -> eat -> put_down -> think、
// そのあと気が向いたら request_talk -> talk -> end_talk
pub fn run(id: usize, monitor: Arc<DiningMonitor>) {
    let mut rng = rand::thread_rng();

    for _ in 0..DINING_STEPS {
        monitor.pick_up(id);
        eat(id, &mut rng);
        monitor.put_down(id);
        think(id, &mut rng);

        // 半々の確率で一言いいたくなる
        // 発言権が取れなかった (食事中扱いで見送られた) 場合は end_talk を呼ばない
        if rng.gen_ratio(1, 2) && monitor.request_talk(id) {
            talk(id, &mut rng);
            monitor.end_talk(id);
        }
    }
}

fn waste_time(rng: &mut impl Rng) {
    thread::sleep(Duration::from_millis(rng.gen_range(0..TIME_TO_WASTE)));
}

fn eat(id: usize, rng: &mut impl Rng) {
    println!("{id}: start eating");
    waste_time(rng);
    println!("{id}: done eating");
}

fn think(id: usize, rng: &mut impl Rng) {
    println!("{id}: start thinking");
    waste_time(rng);
    println!("{id}: done thinking");
}

fn talk(id: usize, rng: &mut impl Rng) {
    println!("{id}: start talking");
    say_something(id, rng);
    println!("{id}: done talking");
}

fn say_something(id: usize, rng: &mut impl Rng) {
    let phrase = match rng.gen_range(0..5) {
        0 => "eat, think, talk, and eat again".to_string(),
        1 => "true is false if you think about it long enough".to_string(),
        2 => "2 + 2 = 5 for extremely large values of 2".to_string(),
        3 => "a hungry philosopher proves nothing".to_string(),
        _ => format!("my number is {id}"),
    };

    println!("{id}: says \"{phrase}\"");
}
