use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use unidb_unicode_info::*;

/// Database shaped like the real one: a dense prefix, sparse singles and a few large ranges.
fn synthetic_database() -> UnicodeDatabase {
	let mut characters = Vec::new();
	let mut push = |first: u32, last: u32| {
		let mut record = CharacterRecord::new(CodePointRange::new(first, last).unwrap(), BidirectionalClass::LeftToRight);
		record.category = Category::OtherLetter;
		record.name = Some("SYNTHETIC CHARACTER".to_string());
		characters.push(record);
	};

	for code_point in 0..0x378 {
		push(code_point, code_point);
	}
	for code_point in (0x400..0x3400).step_by(3) {
		push(code_point, code_point);
	}
	push(0x3400, 0x4DBF);
	push(0x4E00, 0x9FFF);
	push(0xAC00, 0xD7A3);
	for code_point in (0x10000..0x20000).step_by(7) {
		push(code_point, code_point);
	}
	push(0x20000, 0x2A6DF);

	let blocks = (0..0x300)
		.map(|idx| BlockRecord { range: CodePointRange::new(idx * 0x80, idx * 0x80 + 0x7F).unwrap(), name: format!("Block {idx}") })
		.collect();
	let ideographs = (0x4E00..0x9FFF).step_by(2).map(IdeographRecord::new).collect();

	UnicodeDatabase::new(UnicodeVersion::new(15, 1), characters, blocks, ideographs).unwrap()
}

fn lookup(c: &mut Criterion) {
	let db = synthetic_database();
	let mut rng = StdRng::seed_from_u64(42);
	let code_points = (0..1024).map(|_| rng.gen_range(0..0x30000)).collect::<Vec<u32>>();

	c.bench_function("find_character dense prefix", |b| b.iter(|| db.find_character(black_box(0x41))));
	c.bench_function("find_character random", |b| b.iter(|| {
		code_points.iter().filter(|&&code_point| db.find_character(black_box(code_point)).is_some()).count()
	}));
	c.bench_function("get_char_info random", |b| b.iter(|| {
		code_points.iter().map(|&code_point| db.get_char_info(black_box(code_point)).category() as u32).sum::<u32>()
	}));
	c.bench_function("get_name range", |b| b.iter(|| db.get_name(black_box(0x4E01))));
}

fn serialization(c: &mut Criterion) {
	let db = synthetic_database();
	let mut compressed = Vec::new();
	db.write_to(&mut compressed, true).unwrap();
	let raw = db.to_bytes().unwrap();

	c.bench_function("load uncompressed", |b| b.iter(|| UnicodeDatabase::from_bytes(black_box(&raw)).unwrap()));
	c.bench_function("load compressed", |b| b.iter(|| UnicodeDatabase::from_bytes(black_box(&compressed)).unwrap()));
}

criterion_group!(benches, lookup, serialization);
criterion_main!(benches);
