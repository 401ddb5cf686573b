use ethers::contract::abigen;

abigen!(MuonFeargame, "artifacts/MuonFeargame.json");

abigen!(MuonV01, "artifacts/MuonV01.json");
