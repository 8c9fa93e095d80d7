//! Phonetic classification tables for the Turkish CVVC scheme.
//!
//! Three fixed tables drive classification, all built once from literal
//! definitions and never mutated afterwards:
//!
//! - the **vowel table** answers "what vowel quality does this surface token
//!   end in" (`kya` → `a`)
//! - the **consonant table** answers "what consonant identity does this
//!   surface token begin with" (`kya` → `ky`)
//! - the **substitution table** maps a consonant identity a bank lacks to
//!   the identity to try instead (`ky` → `k`)
//!
//! The same surface token is deliberately classified by both of the first
//! two tables depending on the question being asked. They are kept as two
//! separate maps behind two separately named accessors; callers pick the
//! accessor for the question, never a merged table.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// A canonical phone identity: a vowel quality, a standalone sonorant, or a
/// consonant class name out of the fixed inventory below.
pub type PhoneClass = &'static str;

/// Symbols that stand alone as a syllable: pure vowels, sonorants sung on
/// their own, and their creaky `9`-prefixed variants.
const PLAIN_VOWELS: &[&str] = &[
    "a", "e", "ae", "eu", "i", "o", "oe", "u", "ue", "L", "LY", "M", "N", "NG", "9a", "9e", "9ae",
    "9eu", "9i", "9o", "9oe", "9u", "9ue",
];

/// Symbols that stand alone without carrying a vowel: bare consonants, the
/// glottal stop, breath marks.
const NON_VOWELS: &str = "9,b,c,ch,d,f,g,h,j,k,l,m,n,p,r,rr,r',s,sh,t,v,w,y,z,by,dy,gy,hy,ky,ly,my,ny,py,ry,ty,-,?,q";

/// Vowel table definitions: `quality=surface,surface,...`.
const VOWEL_DEFS: &[&str] = &[
    "a=a,ba,ca,cha,da,fa,ga,gya,ha,ja,ka,kya,la,lya,ma,na,pa,ra,rra,r'a,sa,sha,ta,va,wa,ya,za,9a,qa,? a,bra,dra,gra,gla,hra,kra,kla,ksa,pra,pla,psa,tra,fra,fla,sla,ska,spa,sta,vla",
    "e=e,be,ce,che,de,fe,ge,he,je,ke,le,lye,me,ne,pe,re,rre,r'e,se,she,te,ve,we,ye,ze,9e,qe,? e,bre,dre,gre,gle,hre,kre,kle,kse,pre,ple,pse,tre,fre,fle,sle,ske,spe,ste,vle",
    "o=o,bo,co,cho,do,fo,go,ho,jo,ko,lo,lyo,mo,no,po,ro,rro,r'o,so,sho,to,vo,wo,yo,zo,9o,qo,? o,bro,dro,gro,glo,hro,kro,klo,kso,pro,plo,pso,tro,fro,flo,slo,sko,spo,sto,vlo",
    "u=u,bu,cu,chu,du,fu,gu,hu,ju,ku,lu,lyu,mu,nu,pu,ru,rru,r'u,su,shu,tu,vu,wu,yu,zu,9u,qu,? u,bru,dru,gru,glu,hru,kru,klu,ksu,pru,plu,psu,tru,fru,flu,slu,sku,spu,stu,vlu",
    "i=i,bi,ci,chi,di,fi,gi,gyi,hi,ji,ki,li,lyi,mi,ni,pi,ri,rri,r'i,si,shi,ti,vi,wi,yi,zi,9i,qi,? i,bri,dri,gri,gli,hri,kri,kli,ksi,pri,pli,psi,tri,fri,fli,sli,ski,spi,sti,vli",
    "ae=ae,bae,cae,chae,dae,fae,gae,hae,jae,kae,lae,lyae,mae,nae,pae,rae,rrae,r'ae,sae,shae,tae,vae,wae,yae,zae,9ae,qae,? ae,brae,drae,grae,glae,hrae,krae,klae,ksae,prae,plae,psae,trae,frae,flae,slae,skae,spae,stae,vlae",
    "eu=eu,beu,ceu,cheu,deu,feu,geu,heu,jeu,keu,leu,lyeu,meu,neu,peu,reu,rreu,r'eu,seu,sheu,teu,veu,weu,yeu,zeu,9eu,qeu,? eu,breu,dreu,greu,gleu,hreu,kreu,kleu,kseu,preu,pleu,pseu,treu,freu,fleu,sleu,skeu,speu,steu,vleu",
    "oe=oe,boe,coe,choe,doe,foe,goe,hoe,joe,koe,loe,lyoe,moe,noe,poe,roe,rroe,r'oe,soe,shoe,toe,voe,woe,yoe,zoe,9oe,qoe,? oe,broe,droe,groe,gloe,hroe,kroe,kloe,ksoe,proe,ploe,psoe,troe,froe,floe,sloe,skoe,spoe,stoe,vloe",
    "ue=ue,bue,cue,chue,due,fue,gue,hue,jue,kue,lue,lyue,mue,nue,pue,rue,rrue,r'ue,sue,shue,tue,vue,wue,yue,zue,9ue,que,? ue,brue,drue,grue,glue,hrue,krue,klue,ksue,prue,plue,psue,true,frue,flue,slue,skue,spue,stue,vlue",
    "N=N",
    "M=M",
    "NG=NG",
    "L=L",
    "LY=LY",
];

/// Consonant table definitions: `identity=surface,surface,...`.
const CONSONANT_DEFS: &[&str] = &[
    "b=b,ba,bae,beu,bo,bu,bra,brae,breu,bro,bru",
    "by=by,bi,be,boe,bue,bri,bre,broe,brue",
    "d=d,da,dae,deu,do,du,dra,drae,dreu,dro,dru",
    "dy=dy,di,de,doe,due,dri,dre,droe,drue",
    "g=g,ga,gae,geu,go,gu,gra,grae,greu,gro,gru,gla,glae,gleu,glo,glu",
    "gy=gy,gya,gi,ge,goe,gue,gri,gre,groe,grue,gli,gle,gloe,glue",
    "h=h,ha,hae,heu,ho,hu,hra,hrae,hreu,hro,hru",
    "hy=hy,hi,he,hoe,hue,hri,hre,hroe,hrue",
    "k=k,ka,kae,keu,ko,ku,kra,krae,kreu,kro,kru,kla,klae,kleu,klo,klu,ksa,ksae,kseu,kso,ksu",
    "ky=ky,kya,ki,ke,koe,kue,kri,kre,kroe,krue,kli,kle,kloe,klue,ksi,kse,ksoe,ksue",
    "l=l,la,lae,leu,lo,lu",
    "ly=ly,li,le,loe,lue,lya,lyu,lye,lyo",
    "m=m,ma,mae,meu,mo,mu",
    "my=my,mi,me,moe,mue",
    "n=n,na,nae,neu,no,nu",
    "ny=ny,ni,ne,noe,nue",
    "p=p,pa,pae,peu,po,pu,pra,prae,preu,pro,pru,pla,plae,pleu,plo,plu,psa,psae,pseu,pso,psu",
    "py=py,pi,pe,poe,pue,pri,pre,proe,prue,pli,ple,ploe,plue,psi,pse,psoe,psue",
    "r=r,ra,rae,reu,ro,ru",
    "ry=ry,ri,re,roe,rue",
    "t=t,ta,tae,teu,to,tu,tra,trae,treu,tro,tru",
    "ty=ty,ti,te,toe,tue,tri,tre,troe,true",
    "c=c,ca,ce,cae,ceu,ci,co,coe,cu,cue",
    "ch=ch,cha,che,chae,cheu,chi,cho,choe,chu,chue",
    "f=f,fa,fe,fae,feu,fi,fo,foe,fu,fue,fra,fre,frae,freu,fri,fro,froe,fru,frue,fla,fle,flae,fleu,fli,flo,floe,flu,flue",
    "j=j,ja,je,jae,jeu,ji,jo,joe,ju,jue",
    "rr=rr,rra,rre,rrae,rreu,rri,rro,rroe,rru,rrue",
    "r'=r',r'a,r'e,r'ae,r'eu,r'i,r'o,r'oe,r'u,r'ue",
    "s=s,sa,se,sae,seu,si,so,soe,su,sue,sla,sle,slae,sleu,sli,slo,sloe,slu,slue,ska,ske,skae,skeu,ski,sko,skoe,sku,skue,spa,spe,spae,speu,spi,spo,spoe,spu,spue,sta,ste,stae,steu,sti,sto,stoe,stu,stue",
    "sh=sh,sha,she,shae,sheu,shi,sho,shoe,shu,shue",
    "v=v,va,ve,vae,veu,vi,vo,voe,vu,vue,vla,vle,vlae,vleu,vli,vlo,vloe,vlu,vlue",
    "w=w,wa,we,wae,weu,wi,wo,woe,wu,wue",
    "y=y,ya,ye,yae,yeu,yi,yo,yoe,yu,yue",
    "z=z,za,ze,zae,zeu,zi,zo,zoe,zu,zue",
    "q=q,qa,qe,qae,qeu,qi,qo,qoe,qu,que",
    "?=?,? a,? e,? ae,? eu,? i,? o,? oe,? u,? ue",
];

/// Substitution table definitions: `missing,missing,...=fallback`.
/// Used when a bank lacks samples for a consonant identity.
const SUBSTITUTION_DEFS: &[&str] = &[
    "by,br=b",
    "c,dr,dy,j=d",
    "fl,fr=f",
    "gl,gr,gy=g",
    "hr,hy=h",
    "kl,kr,ks,ky=k",
    "ly,L,LY=l",
    "my,M=m",
    "ny,ng,NG,N=n",
    "pl,pr,ps,py=p",
    "ry,rr,r'=r",
    "sk,sl,sp,st=s",
    "tr,ty,ch=t",
    "vl,w=v",
    "q=?",
];

/// Build a surface → class map from `class=member,member,...` lines.
fn build_class_table(defs: &[&'static str]) -> HashMap<&'static str, PhoneClass> {
    let mut table = HashMap::new();
    for line in defs {
        let (class, members) = line
            .split_once('=')
            .unwrap_or_else(|| panic!("malformed class definition: {line}"));
        for member in members.split(',') {
            table.insert(member, class);
        }
    }
    table
}

static VOWEL_TABLE: Lazy<HashMap<&'static str, PhoneClass>> =
    Lazy::new(|| build_class_table(VOWEL_DEFS));

static CONSONANT_TABLE: Lazy<HashMap<&'static str, PhoneClass>> =
    Lazy::new(|| build_class_table(CONSONANT_DEFS));

/// Substitutions are keyed the other way around: `missing=fallback`.
static SUBSTITUTION_TABLE: Lazy<HashMap<&'static str, PhoneClass>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for line in SUBSTITUTION_DEFS {
        let (missing, fallback) = line
            .split_once('=')
            .unwrap_or_else(|| panic!("malformed substitution definition: {line}"));
        for symbol in missing.split(',') {
            table.insert(symbol, fallback);
        }
    }
    table
});

/// The set of consonant identities themselves (the left-hand sides of the
/// consonant table), for recognizing a lyric that *starts as* a consonant.
static CONSONANT_IDENTITIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    CONSONANT_DEFS
        .iter()
        .map(|line| line.split_once('=').expect("malformed class definition").0)
        .collect()
});

static STANDALONE_CONSONANTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NON_VOWELS.split(',').collect());

/// The vowel quality a surface token ends in, if the vowel table knows it.
pub fn vowel_quality_of(token: &str) -> Option<PhoneClass> {
    VOWEL_TABLE.get(token).copied()
}

/// The consonant identity a surface token begins with, if the consonant
/// table knows it.
pub fn consonant_identity_of(token: &str) -> Option<PhoneClass> {
    CONSONANT_TABLE.get(token).copied()
}

/// The fallback identity to try when a bank lacks samples for `class`.
pub fn substitute_for(class: &str) -> Option<PhoneClass> {
    SUBSTITUTION_TABLE.get(class).copied()
}

/// Whether a lyric is a standalone vowel symbol.
pub fn is_standalone_vowel(lyric: &str) -> bool {
    PLAIN_VOWELS.contains(&lyric)
}

/// Whether a lyric is a standalone non-vowel symbol.
pub fn is_standalone_consonant(lyric: &str) -> bool {
    STANDALONE_CONSONANTS.contains(lyric)
}

/// Whether `value` is itself a consonant identity (a class name like `k` or
/// `ky`, as opposed to a surface token like `ka`).
pub fn is_consonant_identity(value: &str) -> bool {
    CONSONANT_IDENTITIES.contains(value)
}
